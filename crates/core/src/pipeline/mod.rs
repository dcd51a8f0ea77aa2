pub mod scan_image_use_case;
