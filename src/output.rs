//! Output formatting for study trends.
//!
//! Supports a debug dump, pretty JSON, and CSV with one row per species.

use anyhow::Result;
use clap::ValueEnum;
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::study::Trends;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Serialize)]
struct SpeciesRow<'a> {
    species: &'a str,
    count: usize,
}

/// Writes trends using Rust's debug format.
pub fn write_pretty<W: Write>(mut writer: W, trends: &Trends) -> Result<()> {
    writeln!(writer, "{:?}", trends)?;
    Ok(())
}

/// Writes any serializable value as pretty-printed JSON.
pub fn write_json<W: Write>(mut writer: W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes the species distribution as `species,count` CSV rows with a header.
pub fn write_csv<W: Write>(writer: W, trends: &Trends) -> Result<()> {
    debug!(rows = trends.species_distribution.len(), "Writing CSV");

    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    for (species, count) in trends.species_distribution.iter() {
        writer.serialize(SpeciesRow { species, count })?;
    }
    writer.flush()?;

    Ok(())
}

pub fn write_trends<W: Write>(writer: W, trends: &Trends, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_pretty(writer, trends),
        OutputFormat::Json => write_json(writer, trends),
        OutputFormat::Csv => write_csv(writer, trends),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::SpeciesDistribution;

    fn trends() -> Trends {
        let mut species_distribution = SpeciesDistribution::default();
        for species in ["Trout", "Trout", "Pike"] {
            species_distribution.increment(species);
        }
        Trends {
            species_distribution,
            observation_count: 2,
        }
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_trends(&mut buf, &trends(), format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_output() {
        assert_eq!(
            render(OutputFormat::Text),
            "Trends { species_distribution: {\"Trout\": 2, \"Pike\": 1}, observation_count: 2 }\n"
        );
    }

    #[test]
    fn test_json_output() {
        let json = render(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["species_distribution"]["Trout"], 2);
        assert_eq!(value["species_distribution"]["Pike"], 1);
        assert_eq!(value["observation_count"], 2);
        assert!(json.find("Trout").unwrap() < json.find("Pike").unwrap());
    }

    #[test]
    fn test_csv_output() {
        assert_eq!(render(OutputFormat::Csv), "species,count\nTrout,2\nPike,1\n");
    }

    #[test]
    fn test_csv_empty_distribution() {
        let empty = Trends {
            species_distribution: SpeciesDistribution::default(),
            observation_count: 0,
        };
        let mut buf = Vec::new();
        write_csv(&mut buf, &empty).unwrap();

        assert!(buf.is_empty());
    }
}
