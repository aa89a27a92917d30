pub mod profile_image;

pub use profile_image::ProfileImageUpload;
