use std::fmt;

use xxhash_rust::xxh3::Xxh3;

use crate::{
    animation::track::{Interp, Lerp, Track},
    timeline::{
        compiler::TrackOffsets,
        states::{Drift, Inset, Motion, Stroke, Underline, Wipe},
    },
};

const XXH3_SEED: u64 = 0x6f76_6c61_795f_6231;

/// Stable 128-bit content fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Fingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint of the exact document bytes; equal across idempotent regenerations.
pub fn fingerprint_document(doc: &str) -> Fingerprint {
    let mut h = StableHasher::new();
    h.write_bytes(doc.as_bytes());
    h.finish()
}

/// Fingerprint of a compiled timeline, independent of how it is later serialized.
pub fn fingerprint_timeline(offsets: &TrackOffsets) -> Fingerprint {
    let mut h = StableHasher::new();
    h.write_f64(offsets.total_secs());
    write_track(&mut h, &offsets.banner);
    write_track(&mut h, &offsets.text);
    write_track(&mut h, &offsets.logo);
    write_track(&mut h, &offsets.underline);
    write_track(&mut h, &offsets.stroke);
    match &offsets.tagline {
        Some(t) => {
            h.write_u8(1);
            write_track(&mut h, t);
        }
        None => h.write_u8(0),
    }
    match &offsets.hover {
        Some(t) => {
            h.write_u8(1);
            write_track(&mut h, t);
        }
        None => h.write_u8(0),
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> Fingerprint {
        let v = self.inner.digest128();
        Fingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

trait StableHash {
    fn stable_hash(&self, h: &mut StableHasher);
}

fn write_track<T>(h: &mut StableHasher, track: &Track<T>)
where
    T: StableHash + Lerp + Clone + PartialEq,
{
    h.write_str(&track.name);
    h.write_str(&track.ease.css());
    h.write_u64(track.stops().len() as u64);
    for stop in track.stops() {
        h.write_f64(stop.percent);
        h.write_u8(match stop.interp {
            Interp::Step => 0,
            Interp::Linear => 1,
        });
        stop.value.stable_hash(h);
    }
}

impl StableHash for Inset {
    fn stable_hash(&self, h: &mut StableHasher) {
        h.write_f64(self.top);
        h.write_f64(self.right);
        h.write_f64(self.bottom);
        h.write_f64(self.left);
    }
}

impl StableHash for Motion {
    fn stable_hash(&self, h: &mut StableHasher) {
        h.write_f64(self.translate.x);
        h.write_f64(self.translate.y);
        h.write_f64(self.scale);
        h.write_f64(self.opacity);
        h.write_f64(self.blur_px);
    }
}

impl StableHash for Underline {
    fn stable_hash(&self, h: &mut StableHasher) {
        h.write_f64(self.scale_x);
        h.write_f64(self.opacity);
        h.write_f64(self.origin_x);
    }
}

impl StableHash for Stroke {
    fn stable_hash(&self, h: &mut StableHasher) {
        h.write_f64(self.opacity);
        self.clip.stable_hash(h);
    }
}

impl StableHash for Wipe {
    fn stable_hash(&self, h: &mut StableHasher) {
        self.clip.stable_hash(h);
    }
}

impl StableHash for Drift {
    fn stable_hash(&self, h: &mut StableHasher) {
        h.write_f64(self.offset.x);
        h.write_f64(self.offset.y);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/fingerprint.rs"]
mod tests;
