//! CLI command for showing PTM/HSH header information

use std::path::Path;

use crate::formats::{RtiFormat, hsh, ptm};

/// Show header info of a PTM or HSH file
pub fn execute(path: &Path) -> anyhow::Result<()> {
    let format = RtiFormat::from_path(path)?;
    let data = std::fs::read(path)?;

    println!("{} Information: {}", format.name(), path.display());
    println!();

    match format {
        RtiFormat::Hsh => {
            let header = hsh::read_header(&data)?;
            println!("Dimensions: {}x{}", header.width, header.height);
            println!("RTI type: {}", header.rti_type);
            println!("Colour channels: {}", header.dimension);
            println!("Basis terms: {}", header.terms);
            println!("Basis type: {}", header.basis_type);
            println!("Element size: {}", header.element_size);
        }
        RtiFormat::Ptm => {
            let header = ptm::read_header(&data)?;
            println!("Dimensions: {}x{}", header.width, header.height);
            println!("Version: {}", header.version);
            println!("Format: {}", header.format);
            println!("Scale: {:?}", header.scale);
            println!("Bias: {:?}", header.bias);
        }
    }

    println!("File size: {} bytes", data.len());
    Ok(())
}
