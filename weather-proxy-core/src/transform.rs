use crate::{error::ProxyError, model::DailyRow, provider::DailySeries};

/// Turn the archive's parallel daily arrays into rows.
///
/// Arrays are zipped positionally, so the shortest one decides the row count.
pub fn reshape(series: &DailySeries) -> Result<Vec<DailyRow>, ProxyError> {
    series
        .time
        .iter()
        .zip(&series.temperature_2m_max)
        .zip(&series.temperature_2m_min)
        .zip(&series.precipitation_sum)
        .enumerate()
        .map(|(index, (((date, max_temp), min_temp), precip))| {
            let (year, month, day) = split_date(date)?;
            Ok(DailyRow {
                day,
                month,
                year,
                doy: index as u32 + 1,
                max_temp: *max_temp,
                min_temp: *min_temp,
                precip: *precip,
            })
        })
        .collect()
}

/// Split `YYYY-MM-DD` into its numeric parts.
fn split_date(date: &str) -> Result<(i32, u32, u32), ProxyError> {
    let mut parts = date.split('-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ProxyError::Internal(format!("malformed date '{date}'")));
    };

    let parse_err = |e: std::num::ParseIntError| ProxyError::Internal(format!("malformed date '{date}': {e}"));
    Ok((
        year.parse().map_err(parse_err)?,
        month.parse().map_err(parse_err)?,
        day.parse().map_err(parse_err)?,
    ))
}
