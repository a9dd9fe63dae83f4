use log::debug;
use polars::prelude::*;

use crate::algorithms::{compute_yearly_payouts, haversine_distance};
use crate::config::ColumnNames;
use crate::core::{Event, GeoPoint, MeasuredEvent, PayoutSchedule, YearlyPayouts};
use crate::error::{PayoutError, PayoutResult};
use crate::time::parse_event_time;
use qtty::Kilometers;

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

fn required_column<'a>(df: &'a DataFrame, name: &str) -> PayoutResult<&'a Column> {
    let column = df
        .column(name)
        .map_err(|_| PayoutError::MissingColumn(name.to_string()))?;

    let nulls = column.null_count();
    if nulls > 0 {
        return Err(PayoutError::NullValues {
            column: name.to_string(),
            count: nulls,
        });
    }
    Ok(column)
}

/// Read a numeric column as `f64`, widening integer columns.
fn float_values(df: &DataFrame, name: &str) -> PayoutResult<Vec<f64>> {
    let column = required_column(df, name)?;
    if !is_numeric(column.dtype()) {
        return Err(PayoutError::ColumnType {
            column: name.to_string(),
            dtype: column.dtype().to_string(),
        });
    }

    let widened = column.cast(&DataType::Float64)?;
    Ok(widened.f64()?.into_no_null_iter().collect())
}

fn string_values(df: &DataFrame, name: &str) -> PayoutResult<Vec<String>> {
    let column = required_column(df, name)?;
    if column.dtype() != &DataType::String {
        return Err(PayoutError::ColumnType {
            column: name.to_string(),
            dtype: column.dtype().to_string(),
        });
    }

    Ok(column
        .str()?
        .into_no_null_iter()
        .map(str::to_string)
        .collect())
}

/// Catalog ids, when the frame carries an id column.
fn optional_ids(df: &DataFrame, name: &str) -> PayoutResult<Option<Vec<Option<String>>>> {
    let Ok(column) = df.column(name) else {
        return Ok(None);
    };

    let as_text = column.cast(&DataType::String)?;
    let ids = as_text
        .str()?
        .into_iter()
        .map(|id| id.map(str::to_string))
        .collect();
    Ok(Some(ids))
}

/// Convert an event table into [`Event`] values.
///
/// The time, magnitude, latitude and longitude columns are required and must
/// be free of nulls. Integer numeric columns are accepted. An id column is
/// picked up when present.
pub fn events_from_frame(df: &DataFrame, columns: &ColumnNames) -> PayoutResult<Vec<Event>> {
    let times = string_values(df, &columns.time)?;
    let magnitudes = float_values(df, &columns.magnitude)?;
    let latitudes = float_values(df, &columns.latitude)?;
    let longitudes = float_values(df, &columns.longitude)?;
    let ids = optional_ids(df, &columns.id)?;

    let mut events = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let time = parse_event_time(&times[row])?;
        let mut event = Event::new(
            time,
            magnitudes[row],
            GeoPoint::new(latitudes[row], longitudes[row]),
        );
        if let Some(id) = ids.as_ref().and_then(|ids| ids[row].clone()) {
            event = event.with_id(id);
        }
        events.push(event);
    }

    debug!("Read {} event(s) from frame", events.len());
    Ok(events)
}

/// Convert a distance-augmented event table into [`MeasuredEvent`] values.
///
/// Requires everything [`events_from_frame`] does plus the distance column.
pub fn measured_events_from_frame(df: &DataFrame, columns: &ColumnNames) -> PayoutResult<Vec<MeasuredEvent>> {
    let distances = float_values(df, &columns.distance)?;
    let events = events_from_frame(df, columns)?;

    Ok(events
        .into_iter()
        .zip(distances)
        .map(|(event, km)| MeasuredEvent::new(event, Kilometers::new(km)))
        .collect())
}

/// Return a copy of `df` with a distance column (km) to `reference`.
///
/// An existing column with the same name is replaced.
pub fn with_distance_column(
    df: &DataFrame,
    reference: &GeoPoint,
    columns: &ColumnNames,
    earth_radius: Kilometers,
) -> PayoutResult<DataFrame> {
    let latitudes = float_values(df, &columns.latitude)?;
    let longitudes = float_values(df, &columns.longitude)?;

    let km: Vec<f64> = latitudes
        .iter()
        .zip(&longitudes)
        .map(|(&lat, &lon)| haversine_distance(reference, &GeoPoint::new(lat, lon), earth_radius).value())
        .collect();

    let mut out = df.clone();
    out.with_column(Series::new(columns.distance.as_str().into(), km))?;
    Ok(out)
}

/// Read a payout-structure table (radius, magnitude and payout columns) into a schedule.
pub fn schedule_from_frame(df: &DataFrame, columns: &ColumnNames) -> PayoutResult<PayoutSchedule> {
    let radii = float_values(df, &columns.distance)?;
    let magnitudes = float_values(df, &columns.magnitude)?;
    let payouts = float_values(df, &columns.payout)?;
    Ok(PayoutSchedule::from_columns(&radii, &magnitudes, &payouts))
}

/// Evaluate a distance-augmented event table against `schedule`.
pub fn yearly_payouts_from_frame(
    df: &DataFrame,
    schedule: &PayoutSchedule,
    columns: &ColumnNames,
) -> PayoutResult<YearlyPayouts> {
    let events = measured_events_from_frame(df, columns)?;
    Ok(compute_yearly_payouts(&events, schedule))
}
