pub mod order;
pub mod product;

use validator::{ValidationErrors, ValidationErrorsKind};

/// Flattens validator output (including nested item errors) into the
/// human-readable messages the HTTP layer returns on a 400.
pub(crate) fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);

    if messages.is_empty() {
        messages.push("Validation failed".to_string());
    }
    messages
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {field}"));
                    out.push(message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_messages(nested, out);
                }
            }
        }
    }
}
