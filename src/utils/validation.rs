use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|err| {
        log::warn!("Rejected payload: {}", err);
        AppError::BadRequest(format!("Validation failed: {}", describe(&err)))
    })
}

fn describe(err: &ValidationErrors) -> String {
    let mut fields = err
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let codes = errs
                .iter()
                .map(|e| e.code.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: [{}]", field, codes)
        })
        .collect::<Vec<_>>();
    fields.sort();
    fields.join("; ")
}
