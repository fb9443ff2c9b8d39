pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_serializes_with_id() {
        let m = types::Message::with_id("Cliente adicionado com sucesso.", 7);
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["message"], "Cliente adicionado com sucesso.");
        assert_eq!(v["id"], 7);
    }

    #[test]
    fn error_body_shape() {
        let v = serde_json::to_value(types::ErrorBody { error: "Tipo inválido.".into() }).unwrap();
        assert_eq!(v, serde_json::json!({"error": "Tipo inválido."}));
    }
}
