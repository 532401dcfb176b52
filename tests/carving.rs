use image::{ImageBuffer, Rgb, RgbImage};
use maskseam::{
    build_cost_matrix, greyscale, trace_seam, EnergyField, Mask, RgbWeights, SeamCarver,
};

// A busy, deterministic test card: no two neighbouring pixels are
// likely to share a colour.
fn test_card(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([
            ((x * 37 + y * 91) % 256) as u8,
            ((x * x * 13 + y * 7) % 256) as u8,
            ((x * 5 + y * y * 29) % 256) as u8,
        ])
    })
}

fn row(image: &RgbImage, y: u32) -> Vec<Rgb<u8>> {
    (0..image.width()).map(|x| *image.get_pixel(x, y)).collect()
}

fn collapse(mut pixels: Vec<Rgb<u8>>) -> Vec<Rgb<u8>> {
    pixels.dedup();
    pixels
}

fn is_subsequence(needle: &[Rgb<u8>], haystack: &[Rgb<u8>]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|p| rest.any(|q| q == p))
}

#[test]
fn identity_is_a_pure_copy() {
    let image = test_card(9, 7);
    let carver = SeamCarver::new(&image, 9).unwrap();
    assert_eq!(carver.resize(), image);
    assert_eq!(carver.mask_after_carving(), Mask::new(9, 7));
    assert_eq!(carver.registry().removed(), &Mask::new(9, 7));
}

#[test]
fn shrinking_keeps_rows_in_order() {
    let image = test_card(12, 8);
    let carved = maskseam::seamcarve(&image, 7).unwrap();
    assert_eq!(carved.dimensions(), (7, 8));
    for y in 0..8 {
        assert!(is_subsequence(&row(&carved, y), &row(&image, y)));
    }
}

#[test]
fn growing_only_doubles_pixels() {
    let image = test_card(12, 8);
    let carved = maskseam::seamcarve(&image, 17).unwrap();
    assert_eq!(carved.dimensions(), (17, 8));
    for y in 0..8 {
        assert_eq!(collapse(row(&carved, y)), collapse(row(&image, y)));
    }
}

#[test]
fn every_row_gives_up_one_pixel_per_seam() {
    let image = test_card(16, 10);
    let carver = SeamCarver::new(&image, 10).unwrap();
    assert_eq!(carver.seam_count(), 6);
    for y in 0..10 {
        assert_eq!(carver.registry().removed().count_row(y), 6);
    }
    for seam in carver.registry().seams() {
        assert_eq!(seam.len(), 10);
    }
}

#[test]
fn successive_seams_stay_connected_and_within_the_live_width() {
    let image = test_card(14, 9);
    let mask = Mask::new(14, 9);
    let mut field = EnergyField::new(greyscale(&image, &RgbWeights::default()));
    for _ in 0..7 {
        let cost = build_cost_matrix(&field, &mask);
        let seam = trace_seam(&cost, &field, &mask).unwrap();
        assert!(seam.is_connected());
        assert!(seam.columns().iter().all(|&c| c < field.width()));
        field.remove_seam(&seam);
    }
    assert_eq!(field.width(), 7);
}

#[test]
fn fully_protected_image_still_carves() {
    let image = test_card(10, 6);
    let mask = Mask::from_fn(10, 6, |_, _| true);
    let carver = SeamCarver::with_mask(&image, 8, mask, RgbWeights::default()).unwrap();
    let carved = carver.resize();
    assert_eq!(carved.dimensions(), (8, 6));
    assert!(carver.mask_after_carving().cells().iter().all(|p| *p));
}

#[test]
fn protected_diagonal_is_carved_out() {
    // A one-pixel wide diagonal band, still a legal seam.
    let image = test_card(10, 6);
    let mask = Mask::from_fn(10, 6, |x, y| x == y + 2);
    let carver = SeamCarver::with_mask(&image, 9, mask, RgbWeights::default()).unwrap();
    let removed = carver.registry().removed();
    for y in 0..6 {
        assert!(removed[(y + 2, y)]);
    }
    assert!(carver.mask_after_carving().cells().iter().all(|p| !*p));
}

#[test]
fn protected_region_is_consumed_before_the_rest() {
    // Protect a two-column band; two seams should take exactly that.
    let image = test_card(10, 6);
    let mask = Mask::from_fn(10, 6, |x, _| x == 4 || x == 5);
    let carver = SeamCarver::with_mask(&image, 8, mask, RgbWeights::default()).unwrap();
    let removed = carver.registry().removed();
    for y in 0..6 {
        assert_eq!(
            removed.row(y),
            &[false, false, false, false, true, true, false, false, false, false]
        );
    }
}

#[test]
fn seam_picture_differs_only_on_seams() {
    let image = test_card(12, 8);
    let carver = SeamCarver::new(&image, 9).unwrap();
    let white = Rgb([255, 255, 255]);
    let shown = carver.show_seams(white);
    for (x, y, pixel) in shown.enumerate_pixels() {
        if carver.registry().is_removed(x, y) {
            assert_eq!(*pixel, white);
        } else {
            assert_eq!(pixel, image.get_pixel(x, y));
        }
    }
}
