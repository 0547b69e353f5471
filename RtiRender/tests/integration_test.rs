use rtirender::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn hsh_file(width: usize, height: usize, terms: usize, payload_byte: u8) -> Vec<u8> {
    let mut data = format!("# test image\n3\n{width} {height} 3\n{terms} 2 1\n").into_bytes();
    for _ in 0..terms {
        data.extend_from_slice(&1.0f32.to_le_bytes());
    }
    for _ in 0..terms {
        data.extend_from_slice(&0.0f32.to_le_bytes());
    }
    data.extend(std::iter::repeat_n(payload_byte, width * height * 3 * terms));
    data
}

fn flat_ptm() -> Vec<u8> {
    let mut data = b"PTM_1.1\nPTM_FORMAT_LRGB\n1\n1\n1 1 1 1 1 1\n128 128 128 128 128 128\n".to_vec();
    data.extend_from_slice(&[128; 6]);
    data.extend_from_slice(&[200, 100, 50]);
    data
}

#[test]
fn test_single_term_hsh_pixel() {
    let image = decode(&hsh_file(1, 1, 1, 255), RtiFormat::Hsh).unwrap();
    let pixels = render(&image, &LightDirection::overhead(), &RenderOptions::default()).unwrap();

    // 255 / sqrt(2 pi) rounds to 102
    assert_eq!(pixels.pixel(0, 0), [102, 102, 102, 255]);
}

#[test]
fn test_flat_ptm_has_no_division_by_zero() {
    let image = decode(&flat_ptm(), RtiFormat::Ptm).unwrap();
    let DecodedImage::Ptm(ptm) = &image else {
        panic!("expected PTM");
    };
    assert_eq!(ptm.luminance_coefficients(0, 0), [0.0; 6]);
    assert_eq!(ptm.normals.get(0, 0).to_array(), [0.0, 0.0, 1.0]);

    let pixels = render(&image, &LightPad::default().direction(40.0, -30.0), &RenderOptions::default())
        .unwrap();
    assert_eq!(pixels.pixel(0, 0), [0, 0, 0, 255]);
}

#[test]
fn test_relight_without_decoding_again() {
    let image = decode(&hsh_file(2, 2, 4, 200), RtiFormat::Hsh).unwrap();
    let pad = LightPad::default();
    let mut buffer = PixelBuffer::new(image.width(), image.height());

    let mut frames = Vec::new();
    for lx in [-100.0, 0.0, 100.0] {
        render_into(&image, &pad.direction(lx, 0.0), &RenderOptions::default(), &mut buffer).unwrap();
        frames.push(buffer.data().to_vec());
    }

    let again = render(&image, &pad.direction(0.0, 0.0), &RenderOptions::default()).unwrap();
    assert_eq!(again.data(), frames[1].as_slice());
    assert!(frames.iter().all(|frame| frame.len() == 2 * 2 * 4));
}

#[test]
fn test_convert_to_png_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tile.rti");
    let output = dir.path().join("tile.png");
    std::fs::write(&input, hsh_file(1, 1, 1, 255)).unwrap();

    convert_to_png(&input, &output, &RenderConfig::default(), 0.0, 0.0).unwrap();

    let img = image::open(&output).unwrap().to_rgba8();
    // A 1x1 image is fitted into the 320x470 viewer
    assert_eq!(img.dimensions(), (320, 320));
    assert_eq!(img.get_pixel(17, 200).0, [102, 102, 102, 255]);
}

#[test]
fn test_unknown_extension_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tile.png");
    std::fs::write(&input, b"not an rti").unwrap();

    let err = decode_file(&input).unwrap_err();
    assert!(matches!(err, Error::UnsupportedExtension(_)));
    assert!(err.is_format_error());
}

#[test]
fn test_scale_table_downscale() {
    assert_eq!(scale_table(4, 2), vec![1, 3]);
}

#[test]
fn test_decode_ieee754() {
    assert_eq!(decode_ieee754_le(1.5f32.to_le_bytes()), 1.5);
    assert_eq!(decode_ieee754_le([0, 0, 0, 0]), 0.0);
}
