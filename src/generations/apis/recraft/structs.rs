pub mod recraft_generate_images_response;
