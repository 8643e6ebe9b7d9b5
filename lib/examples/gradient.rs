/// Gradient example: render a synthetic image at several grid sizes
///
/// Builds a horizontal gradient with a dark disc in the middle and prints it
/// with a fixed grid and with aspect-corrected auto height.
use asciify::{AsciiConfig, SizePolicy, process_image};
use image::{Rgb, RgbImage};

fn main() -> asciify::Result<()> {
    let width = 320;
    let height = 160;
    let mut img = RgbImage::new(width, height);

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 50.0;

    for (x, y, px) in img.enumerate_pixels_mut() {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let gray = if (dx * dx + dy * dy).sqrt() < radius {
            20
        } else {
            (x * 255 / (width - 1)) as u8
        };
        *px = Rgb([gray, gray, gray]);
    }

    println!("Source image: {}x{}\n", width, height);

    let fixed = AsciiConfig {
        size: SizePolicy::Fixed {
            width: 60,
            height: 20,
        },
        ..Default::default()
    };
    println!("Fixed 60x20:");
    print!("{}", process_image(&img, &fixed)?);

    let auto = AsciiConfig {
        size: SizePolicy::auto_height(80),
        ..Default::default()
    };
    let art = process_image(&img, &auto)?;
    println!("\nAuto height at 80 columns ({} rows):", art.height());
    print!("{}", art);

    Ok(())
}
