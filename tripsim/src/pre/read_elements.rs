use crate::core::element::ElementPars;
use anyhow::Context;
use std::fs::OpenOptions;
use std::path::Path;

/// read_elements reads a CSV file with the columns distance, size, sprite_src, and (optionally)
/// horizontal_position and returns the contained element parameters in file order.
pub fn read_elements(filepath: &Path) -> anyhow::Result<Vec<ElementPars>> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!("Failed to open element file {}!", filepath.display()))?;

    // read and parse csv element data
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(&fh);
    let mut elements: Vec<ElementPars> = vec![];

    for (i, result) in csv_reader.deserialize().enumerate() {
        let element_pars: ElementPars = result.context(format!(
            "Failed to parse row {} of element file {}!",
            i + 1,
            filepath.display()
        ))?;
        elements.push(element_pars);
    }

    Ok(elements)
}
