use super::rules::recommendation_template;

/// Maps each missing field to remediation text, preserving length and order.
pub fn generate_recommendations(missing_fields: &[String]) -> Vec<String> {
    missing_fields
        .iter()
        .map(|field| match recommendation_template(field) {
            Some(text) => text.to_string(),
            None => fallback(field),
        })
        .collect()
}

fn fallback(field: &str) -> String {
    format!(
        "Consider adding the {} to this document.",
        field.replace('_', " ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mirrors_length_and_order() {
        let missing = fields(&["due_date", "tax", "bill_to", "bill_from"]);
        let recs = generate_recommendations(&missing);

        assert_eq!(recs.len(), 4);
        assert_eq!(recs[0], recommendation_template("due_date").unwrap());
        assert_eq!(recs[1], recommendation_template("tax").unwrap());
        assert_eq!(recs[2], recommendation_template("bill_to").unwrap());
        assert_eq!(recs[3], recommendation_template("bill_from").unwrap());
    }

    #[test]
    fn test_fallback_humanizes_name() {
        let recs = generate_recommendations(&fields(&["purchase_order_number"]));
        assert_eq!(
            recs,
            vec!["Consider adding the purchase order number to this document."]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_recommendations(&[]).is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let recs = generate_recommendations(&fields(&["tax", "tax"]));
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0], recs[1]);
    }
}
