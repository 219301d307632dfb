use image::RgbaImage;

/// Convert an RGBA pixel buffer to an egui ColorImage for texture upload.
pub fn rgba_to_color_image(img: &RgbaImage) -> egui::ColorImage {
    let (w, h) = img.dimensions();
    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], img.as_raw())
}
