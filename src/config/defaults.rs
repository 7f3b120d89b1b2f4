//! Default value functions for serde deserialization.

pub fn resolution() -> f64 {
    0.2
}

pub fn length_x() -> f64 {
    80.0
}

pub fn length_y() -> f64 {
    30.0
}

pub fn position_x() -> f64 {
    20.0
}

pub fn sensor_frame() -> String {
    "velodyne".to_string()
}

pub fn map_frame() -> String {
    "map".to_string()
}

pub fn layer_name() -> String {
    "wayarea".to_string()
}

pub fn background() -> f32 {
    255.0
}

pub fn min_value() -> f32 {
    0.0
}

pub fn max_value() -> f32 {
    255.0
}

pub fn fill_value() -> u8 {
    128
}
