use serde_json::json;

use crate::domain::llm::entities::ToolSchema;

pub fn diet_guide_tool() -> ToolSchema {
    ToolSchema {
        name: "create_diet_guide".to_string(),
        description: "Create a structured diet guide".to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "overview": { "type": "string" },
                "recommendations": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": 5,
                    "maxItems": 5
                },
                "mealPlan": {
                    "type": "object",
                    "properties": {
                        "breakfast": { "type": "string" },
                        "lunch": { "type": "string" },
                        "dinner": { "type": "string" },
                        "snacks": { "type": "string" }
                    },
                    "required": ["breakfast", "lunch", "dinner", "snacks"]
                },
                "tips": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": 4,
                    "maxItems": 4
                }
            },
            "required": ["title", "overview", "recommendations", "mealPlan", "tips"]
        }),
    }
}

pub fn enhancement_tool() -> ToolSchema {
    ToolSchema {
        name: "suggest_enhancements".to_string(),
        description: "Suggest ingredient additions that improve a dish".to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "additions": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "ingredient": { "type": "string" },
                            "instructions": { "type": "string" }
                        },
                        "required": ["ingredient"]
                    }
                },
                "generalTips": { "type": "string" }
            },
            "required": ["additions"]
        }),
    }
}
