pub mod file_image_reader;
