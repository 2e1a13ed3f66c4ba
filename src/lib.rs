//! Overlay builder compiles a looping brand banner into a self-contained HTML/CSS overlay.
//!
//! The pipeline is:
//!
//! - Load and validate an [`OverlayConfig`]
//! - [`compile`] its timeline into percent-keyed [`TrackOffsets`]
//! - [`render_document`] them into a deterministic HTML document
//! - [`generate`] writes the document and stages the logo next to it
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub(crate) mod animation;
pub(crate) mod composition;
pub(crate) mod document;
pub(crate) mod foundation;
pub(crate) mod output;
pub(crate) mod timeline;

pub use crate::foundation::core::{
    FULL_CYCLE_PCT, PCT_DECIMALS, Vec2, format_num, format_pct, round_pct, secs_to_pct,
};
pub use crate::foundation::error::{OverlayError, OverlayResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::track::{Interp, Lerp, Stop, Track};
pub use crate::composition::model::OverlayConfig;
pub use crate::document::css::{
    CssState, STEP_EPSILON_PCT, animation_decl, keyframe_rules, write_keyframes,
};
pub use crate::document::html::{DOCUMENT_FILE_NAME, LOGO_REL_PATH, render_document};
pub use crate::document::style::StyleConfig;
pub use crate::output::assets::{StagedAs, stage_logo};
pub use crate::output::fingerprint::{Fingerprint, fingerprint_document, fingerprint_timeline};
pub use crate::output::generate::{GeneratedOverlay, generate};
pub use crate::timeline::compiler::{TrackOffsets, compile};
pub use crate::timeline::config::{TimelineConfig, Variant};
pub use crate::timeline::phases::{PhaseBoundaries, Window};
pub use crate::timeline::states::{Drift, Inset, Motion, Stroke, Underline, Wipe};
