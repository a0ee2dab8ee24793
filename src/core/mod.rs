// Core algorithm exports
pub mod distance;
pub mod error;
pub mod frechet;
pub mod hausdorff;
pub mod matcher;
pub mod normalize;
pub mod resample;
pub mod scoring;
pub mod turning;

pub use distance::{bounding_box, centroid, distance, validate_points};
pub use error::MatchError;
pub use frechet::{cyclic_frechet, discrete_frechet, rotation_offsets, FrechetTable};
pub use hausdorff::{directional_hausdorff, hausdorff};
pub use matcher::{Matcher, MatcherConfig, PreparedShape, RankedMatches};
pub use normalize::{normalize, normalize_bounding_box, normalize_pca, principal_axis_angle, rotate};
pub use resample::{path_length, resample, RESAMPLE_POINTS};
pub use scoring::{similarity, ScoringConstants};
pub use turning::{turning_distance, turning_profile, wrap_angle};
