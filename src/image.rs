use crate::extract::PlateTemperatures;

/// Renders the converged field as a PNG, one pixel per cell, coldest
/// to hottest through the turbo gradient. `y = ny - 1` lands on pixel
/// row 0 so the image shows the plate the way it is oriented.
pub fn render<F: AsRef<std::path::Path>>(
    temperatures: &PlateTemperatures,
    path: &F,
) -> image::ImageResult<()> {
    let gradient = colorous::TURBO;
    let min = temperatures.min();
    // A uniform field has no span; clamp so the division stays finite.
    let span = (temperatures.max() - min).max(f64::MIN_POSITIVE);
    let mut img = image::RgbImage::new(
        temperatures.nx() as u32,
        temperatures.ny() as u32,
    );
    for x in 0..temperatures.nx() {
        for y in 0..temperatures.ny() {
            let r = (temperatures.value(x, y) - min) / span;
            let c = gradient.eval_continuous(r);
            img.put_pixel(
                x as u32,
                (temperatures.ny() - 1 - y) as u32,
                image::Rgb(c.as_array()),
            );
        }
    }
    img.save(path)
}
