use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::{MatchError, Result};
use crate::model::{ChatLogEntry, FaqEntry};

const MATERIAL_FILE_SUFFIXES: &[&str] = &["_FAQs", "_Details"];

fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let reader = BufReader::new(File::open(path)?);
    let mut out = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        out.push(serde_json::from_str(&line)?);
    }

    Ok(out)
}

pub fn save_entries_jsonl(path: &Path, entries: &[FaqEntry]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    for entry in entries {
        serde_json::to_writer(&mut writer, entry)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

pub fn load_entries_jsonl(path: &Path) -> Result<Vec<FaqEntry>> {
    read_jsonl(path)
}

/// Read a CSV export with `Question` and `Answer` columns.
///
/// Lower-case `question`/`answer` headers are accepted too. Missing cells
/// become empty strings; every row is tagged with `material` when given.
pub fn load_entries_csv(path: &Path, material: Option<&str>) -> Result<Vec<FaqEntry>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let column = |names: [&str; 2]| {
        names
            .iter()
            .find_map(|name| headers.iter().position(|h| h.trim() == *name))
    };
    let (Some(question_col), Some(answer_col)) =
        (column(["Question", "question"]), column(["Answer", "answer"]))
    else {
        return Err(MatchError::MissingColumns {
            path: path.to_path_buf(),
            found: headers.iter().map(str::to_string).collect(),
        });
    };

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        entries.push(FaqEntry {
            question: record.get(question_col).unwrap_or_default().to_string(),
            answer: record.get(answer_col).unwrap_or_default().to_string(),
            material: material.map(str::to_string),
        });
    }

    Ok(entries)
}

/// Material tag for a per-material export such as `MDF_FAQs.csv`.
pub fn material_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let material = MATERIAL_FILE_SUFFIXES
        .iter()
        .find_map(|suffix| stem.strip_suffix(suffix))
        .unwrap_or(stem);

    (!material.is_empty()).then(|| material.to_string())
}

/// Load every `*.csv` file in `dir`, skipping files that cannot be read.
pub fn load_faq_dir(dir: &Path) -> Result<Vec<FaqEntry>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    files.sort();
    info!(dir = %dir.display(), files = files.len(), "loading FAQ files");

    let mut entries = Vec::new();
    for file in &files {
        let material = material_from_path(file);
        match load_entries_csv(file, material.as_deref()) {
            Ok(loaded) => {
                info!(
                    file = %file.display(),
                    material = material.as_deref().unwrap_or(""),
                    count = loaded.len(),
                    "added FAQs"
                );
                entries.extend(loaded);
            }
            Err(err) => warn!(file = %file.display(), error = %err, "skipping FAQ file"),
        }
    }

    info!(total = entries.len(), "FAQ entries loaded");
    Ok(entries)
}

/// Load a FAQ directory, CSV file or JSONL file.
pub fn load_faqs(path: &Path) -> Result<Vec<FaqEntry>> {
    if path.is_dir() {
        return load_faq_dir(path);
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_entries_csv(path, material_from_path(path).as_deref()),
        _ => load_entries_jsonl(path),
    }
}

/// Like [`load_faqs`], but falls back to [`default_entries`] when nothing
/// could be loaded.
pub fn load_faqs_or_default(path: &Path) -> Vec<FaqEntry> {
    match load_faqs(path) {
        Ok(entries) if !entries.is_empty() => entries,
        Ok(_) => {
            warn!(path = %path.display(), "no FAQ data loaded, using default data");
            default_entries()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "error loading FAQ data, using default data");
            default_entries()
        }
    }
}

pub fn default_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "What is MDF?",
            "Medium Density Fiberboard (MDF) is an engineered wood product made by breaking down hardwood or softwood residuals into wood fibers, combining it with wax and a resin binder, and forming it into panels by applying high temperature and pressure.",
        )
        .with_material("MDF"),
        FaqEntry::new(
            "What are the advantages of particle board?",
            "Particle board is cost-effective, has consistent density throughout, is environmentally friendly as it uses recycled wood materials, has good screw-holding ability, and is resistant to warping and expansion.",
        )
        .with_material("Particle Board"),
        FaqEntry::new(
            "What is Action TESA HDHMR?",
            "Action TESA HDHMR is a registered trademark of Balaji Action Buildwell Pvt. Ltd. It has many characteristics which make it apparently the first choice of consumers and influencers. HDHMR characteristics include High Density, High Moisture Resistance, Borer Resistance, Termite Resistance, and a ready-to-use smooth surface.",
        )
        .with_material("HDHMR"),
    ]
}

pub fn append_chat_log(path: &Path, entry: &ChatLogEntry) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, entry)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn load_chat_log(path: &Path) -> Result<Vec<ChatLogEntry>> {
    read_jsonl(path)
}
