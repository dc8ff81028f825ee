use serde::{Deserialize, Serialize};

/// Register input: every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub cnpj: String,
    pub name_legal_entity: String,
    pub trade_name: String,
    pub cnae: String,
}

/// Edit input: the only mutable attributes of a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyChanges {
    pub trade_name: String,
    pub cnae: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_fails_to_deserialize() {
        let res = serde_json::from_value::<NewCompany>(serde_json::json!({
            "cnpj": "12345678901234",
            "trade_name": "Acme",
            "cnae": "6201-5"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn changes_ignore_identity_fields() {
        let c: CompanyChanges = serde_json::from_value(serde_json::json!({
            "cnpj": "99999999999999",
            "name_legal_entity": "Ignored",
            "trade_name": "Acme",
            "cnae": "6201-5"
        }))
        .unwrap();
        assert_eq!(c, CompanyChanges { trade_name: "Acme".into(), cnae: "6201-5".into() });
    }

    #[test]
    fn null_is_not_a_string() {
        let res = serde_json::from_value::<CompanyChanges>(serde_json::json!({"trade_name": null, "cnae": "1"}));
        assert!(res.is_err());
    }
}
