use crate::common::time_point::Value;
use crate::{Result, TicklineErr};

pub fn mean(values: &[Value]) -> Result<Value> {
    if values.is_empty() {
        return Err(TicklineErr::InsufficientData { required: 1, found: 0 });
    }
    Ok(values.iter().sum::<Value>() / values.len() as Value)
}

/// Sample standard deviation (`n - 1` divisor). A single value yields NaN, it is not an error.
pub fn standard_deviation(values: &[Value]) -> Result<Value> {
    let mean_value = mean(values)?;
    let sum: Value = values.iter().map(|v| (v - mean_value).powi(2)).sum();
    Ok((sum / (values.len() - 1) as Value).sqrt())
}

pub fn max_with_index(values: &[Value]) -> Option<(usize, Value)> {
    let mut res: Option<(usize, Value)> = None;
    for (i, v) in values.iter().enumerate() {
        match res {
            // strict comparison keeps the earliest of tied maxima
            Some((_, best)) if *v <= best => {}
            _ => res = Some((i, *v)),
        }
    }
    res
}
