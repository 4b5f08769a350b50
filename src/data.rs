use crate::error::DataError;
use crate::models::{Bitmap, Bundle, ImageRef, MetaMap, Point};
use polars::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub fn image_ref_from_value(value: &Value) -> Result<ImageRef, DataError> {
    match value {
        Value::String(path) => Ok(ImageRef::Path(path.clone())),
        Value::Array(items) if items.first().is_some_and(Value::is_array) => {
            let rows = items
                .iter()
                .map(|row| match row {
                    Value::Array(cells) => numbers(cells),
                    other => Err(DataError::unexpected("image", format!("mixed row {other}"))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Bitmap::from_rows(rows)
                .map(ImageRef::Bitmap)
                .ok_or_else(|| DataError::unexpected("image", "ragged or empty bitmap rows"))
        }
        Value::Array(items) => Bitmap::from_flat(numbers(items)?)
            .map(ImageRef::Bitmap)
            .ok_or_else(|| DataError::unexpected("image", "empty bitmap")),
        other => {
            tracing::debug!(value = %other, "row has no image");
            Ok(ImageRef::Missing)
        }
    }
}

fn numbers(cells: &[Value]) -> Result<Vec<f64>, DataError> {
    cells
        .iter()
        .map(|cell| {
            cell.as_f64()
                .ok_or_else(|| DataError::unexpected("pixel", format!("not a number: {cell}")))
        })
        .collect()
}

pub fn image_refs_from_value(value: &Value) -> Result<Vec<ImageRef>, DataError> {
    match value {
        Value::Array(items) => items.iter().map(image_ref_from_value).collect(),
        other => Err(DataError::unexpected(
            "images",
            format!("expected an array, got {other}"),
        )),
    }
}

pub fn points_from_value(value: Value) -> Result<Vec<Point>, DataError> {
    Ok(serde_json::from_value(value)?)
}

pub fn meta_from_value(value: Value) -> Result<MetaMap, DataError> {
    Ok(serde_json::from_value(value)?)
}

/// String columns hold image paths, list columns hold flattened bitmaps.
/// Null cells become [`ImageRef::Missing`].
pub fn image_refs_from_frame(df: &DataFrame, column: &str) -> Result<Vec<ImageRef>, DataError> {
    let series = df
        .column(column)
        .map_err(|_| DataError::MissingColumn(column.to_string()))?
        .as_materialized_series();

    match series.dtype() {
        DataType::String => series
            .str()?
            .into_iter()
            .map(|path| {
                Ok(path.map_or(ImageRef::Missing, |p| ImageRef::Path(p.to_string())))
            })
            .collect(),
        DataType::List(_) => series
            .list()?
            .into_iter()
            .enumerate()
            .map(|(row, cell)| {
                let Some(cell) = cell else {
                    return Ok(ImageRef::Missing);
                };
                let values = cell.cast(&DataType::Float64)?;
                let pixels: Vec<f64> = values.f64()?.into_iter().map(|v| v.unwrap_or(0.0)).collect();
                Bitmap::from_flat(pixels)
                    .map(ImageRef::Bitmap)
                    .ok_or_else(|| DataError::unexpected(column, format!("empty bitmap in row {row}")))
            })
            .collect(),
        other => Err(DataError::unexpected(
            column,
            format!("unsupported column type {other}"),
        )),
    }
}

#[derive(Deserialize)]
struct RawBundle {
    #[serde(default)]
    images: Option<Value>,
    #[serde(default)]
    points: Option<Value>,
    #[serde(default)]
    meta: Option<Value>,
    #[serde(default)]
    projections: BTreeMap<String, Vec<[f64; 2]>>,
    #[serde(default)]
    hyperparams: BTreeMap<String, BTreeMap<String, Value>>,
}

pub fn parse_bundle(text: &str) -> Result<Bundle, DataError> {
    let raw: RawBundle = serde_json::from_str(text)?;
    Ok(Bundle {
        images: raw.images.as_ref().map(image_refs_from_value).transpose()?,
        points: raw.points.map(points_from_value).transpose()?,
        meta: raw.meta.map(meta_from_value).transpose()?,
        projections: raw.projections,
        hyperparams: raw.hyperparams,
    })
}

pub fn load_bundle<P: AsRef<Path>>(path: P) -> Result<Bundle, DataError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bundle = parse_bundle(&text)?;
    tracing::info!(
        path = %path.display(),
        points = bundle.len(),
        projections = bundle.projections.len(),
        "loaded bundle"
    );
    Ok(bundle)
}
