mod equirectangular_projection;

pub use equirectangular_projection::{
    EquirectangularProjection, EARTH_RADIUS_KM, PERTH_REFERENCE_LATITUDE,
};
