// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use image::Rgb;
use log::info;
use maskseam::dump::{energy_to_image, mask_from_image, mask_to_image};
use maskseam::{greyscale, EnergyField, Mask, RgbWeights, SeamCarver};
use std::process;

fn parse_color(hex: &str) -> Result<Rgb<u8>, Error> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format_err!("seam colour must be six hex digits, got {:?}", hex));
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = matches
        .value_of("input")
        .ok_or_else(|| format_err!("no input image given"))?;
    let output = matches
        .value_of("output")
        .ok_or_else(|| format_err!("no output image given"))?;
    let out_width: u32 = matches
        .value_of("width")
        .ok_or_else(|| format_err!("no target width given"))?
        .parse()?;
    let weights: RgbWeights = matches.value_of("weights").unwrap_or("1,1,1").parse()?;
    let seam_color = parse_color(matches.value_of("seam-color").unwrap_or("ff0000"))?;

    let image = image::open(input)?.to_rgb8();
    let (width, height) = image.dimensions();
    info!("loaded {} ({}x{})", input, width, height);

    let mask = match matches.value_of("mask") {
        Some(path) => mask_from_image(&image::open(path)?.to_luma8()),
        None => Mask::new(width, height),
    };

    if let Some(path) = matches.value_of("energy") {
        energy_to_image(&EnergyField::new(greyscale(&image, &weights))).save(path)?;
    }

    let carver = SeamCarver::with_mask(&image, out_width, mask, weights)?;
    carver.resize().save(output)?;

    if let Some(path) = matches.value_of("mask-out") {
        mask_to_image(&carver.mask_after_carving()).save(path)?;
    }
    if let Some(path) = matches.value_of("seams") {
        carver.show_seams(seam_color).save(path)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("maskseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware width resizing with protection masks")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .value_name("PIXELS")
                .help("Target width; at most half the input width away from it")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("mask")
                .short("m")
                .long("mask")
                .value_name("FILE")
                .help("Greyscale image; pixels brighter than mid-grey are carved first")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("mask-out")
                .long("mask-out")
                .value_name("FILE")
                .help("Write the mask, carved alongside the image")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seams")
                .short("s")
                .long("seams")
                .value_name("FILE")
                .help("Write a copy of the input with the chosen seams painted")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seam-color")
                .long("seam-color")
                .value_name("RRGGBB")
                .help("Colour used to paint seams [default: ff0000]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("weights")
                .long("weights")
                .value_name("R,G,B")
                .help("Channel weights for the greyscale energy [default: 1,1,1]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .value_name("FILE")
                .help("Write the initial energy map as a greyscale image")
                .takes_value(true),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("maskseam: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
