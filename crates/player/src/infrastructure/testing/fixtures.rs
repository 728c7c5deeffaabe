//! Wire-shaped JSON fixtures used across unit tests.

use serde_json::{json, Value};

/// `Success` envelope around `value`
pub fn success(value: Value) -> Value {
    json!({"_tag": "Success", "value": value})
}

/// `Failure` envelope with the given code and message
pub fn failure(code: &str, message: &str) -> Value {
    json!({"_tag": "Failure", "error": {"code": code, "message": message}})
}

pub fn user_json(confirmed: bool, onboarded: bool) -> Value {
    json!({
        "id": "u1",
        "email": "ada@example.com",
        "displayName": "Ada",
        "confirmed": confirmed,
        "onboarded": onboarded,
        "selectedCategoryIds": ["c1"]
    })
}

pub fn category_item_json(item_id: &str, category_id: &str) -> Value {
    json!({
        "id": item_id,
        "categoryId": category_id,
        "title": "Adding fractions",
        "kind": "skill",
        "completed": false,
        "position": 1,
        "updatedAt": "2024-02-10T09:30:00Z"
    })
}

/// Sub-quiz with one choice question followed by one ordering question
pub fn sub_quiz_json(quiz_id: &str, category_id: &str) -> Value {
    json!({
        "id": quiz_id,
        "categoryId": category_id,
        "title": "Fractions warm-up",
        "createdAt": "2024-02-01T08:00:00Z",
        "questions": [
            {
                "_tag": "choice_question",
                "id": "qq1",
                "prompt": "1/2 + 1/4 = ?",
                "choices": [
                    {"id": "a", "label": "3/4"},
                    {"id": "b", "label": "2/6"}
                ],
                "position": 1,
                "createdAt": "2024-02-01T08:00:00Z"
            },
            {
                "_tag": "sequence_order",
                "id": "qq2",
                "prompt": "Order from smallest to largest",
                "items": [
                    {"id": "c", "label": "3/4"},
                    {"id": "a", "label": "1/4"},
                    {"id": "b", "label": "1/2"}
                ],
                "position": 2,
                "createdAt": "2024-02-01T08:00:00Z"
            }
        ]
    })
}
