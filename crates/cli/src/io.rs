//! Point files: `.csv` / `.parquet` with `x`,`y` columns (polars), or `.json`
//! holding an array of `[x, y]` pairs.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use quickhull2::hull2::{points_from_xy, Point2};
use std::fs::{self, File};
use std::path::Path;

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    let points = match extension(path).as_str() {
        "csv" => {
            let df = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()?
                .collect()
                .with_context(|| format!("reading {}", path.display()))?;
            points_from_frame(&df)?
        }
        "parquet" => {
            let df = LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
                .collect()
                .with_context(|| format!("reading {}", path.display()))?;
            points_from_frame(&df)?
        }
        "json" => {
            let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let pairs: Vec<[f64; 2]> = serde_json::from_slice(&raw)
                .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
            pairs
                .into_iter()
                .map(|[x, y]| Point2::new(x, y))
                .collect()
        }
        other => bail!(
            "unsupported point file extension {other:?} for {} (expected csv, parquet or json)",
            path.display()
        ),
    };
    tracing::info!(path = %path.display(), n = points.len(), "points_loaded");
    Ok(points)
}

fn points_from_frame(df: &DataFrame) -> Result<Vec<Point2>> {
    let xs = column_f64(df, "x")?;
    let ys = column_f64(df, "y")?;
    Ok(points_from_xy(&xs, &ys)?)
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    let values = series.f64()?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null {name} at row {row}")))
        .collect()
}

pub fn write_points(path: &Path, points: &[Point2]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    match extension(path).as_str() {
        "csv" | "parquet" => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            let mut df = df!("x" => xs, "y" => ys)?;
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            if extension(path) == "csv" {
                CsvWriter::new(&mut file)
                    .include_header(true)
                    .finish(&mut df)?;
            } else {
                ParquetWriter::new(&mut file).finish(&mut df)?;
            }
        }
        "json" => {
            let pairs: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
            fs::write(path, serde_json::to_vec(&pairs)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        other => bail!(
            "unsupported point file extension {other:?} for {} (expected csv, parquet or json)",
            path.display()
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickhull2::prelude::*;
    use tempfile::tempdir;

    #[test]
    fn csv_and_json_files_load_the_same_points() {
        let dir = tempdir().unwrap();
        let pts = draw_cloud(
            CloudCfg {
                count: 50,
                shape: CloudShape::Square,
                radius: 3.0,
            },
            ReplayToken { seed: 9, index: 0 },
        );
        for name in ["pts.csv", "pts.json"] {
            let path = dir.path().join(name);
            write_points(&path, &pts).unwrap();
            let back = read_points(&path).unwrap();
            assert_eq!(back.len(), pts.len());
            for (a, b) in back.iter().zip(&pts) {
                assert!((a - b).norm() < 1e-9, "{name}: {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn json_pairs_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.json");
        fs::write(&path, "[[0,0],[4,0],[4,4],[0,4],[2,2]]").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[2], Point2::new(4.0, 4.0));
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.txt");
        fs::write(&path, "0 0").unwrap();
        let err = read_points(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn csv_needs_both_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x,z\n1,2\n3,4\n").unwrap();
        assert!(read_points(&path).is_err());
    }
}
