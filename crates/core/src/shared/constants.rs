pub const MODEL_NAME: &str = "seeta_fd_frontal_v1.0.bin";
pub const MODEL_URL: &str =
    "https://raw.githubusercontent.com/atomashpolskiy/rustface/master/model/seeta_fd_frontal_v1.0.bin";

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];
