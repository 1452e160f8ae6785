use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::PaymentMethod;

use super::{DispatchError, ExpenseService};

pub const EXPENSES_RESOURCE_URI: &str = "resource://expenses";
pub const ADD_EXPENSE_TOOL: &str = "add_expense";
pub const EXPENSE_PROMPT: &str = "create_expense_prompt";

#[derive(Debug, Clone, Serialize)]
pub struct ResourceDescriptor {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptArgument {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: Vec<PromptArgument>,
}

/// Everything the service exposes, in the shape an agent host registers.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub resources: Vec<ResourceDescriptor>,
    pub tools: Vec<ToolDescriptor>,
    pub prompts: Vec<PromptDescriptor>,
}

/// Arguments of the `add_expense` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct AddExpenseArgs {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub payment_method: PaymentMethod,
}

/// Arguments of the `create_expense_prompt` prompt. The payment method is
/// free text here.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptArgs {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub payment_method: String,
}

pub fn catalog() -> Catalog {
    let payment_methods: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.as_str()).collect();

    Catalog {
        resources: vec![ResourceDescriptor {
            uri: EXPENSES_RESOURCE_URI,
            name: "get_expenses_data",
            description: "Get raw expense data from CSV file",
            mime_type: "text/plain",
        }],
        tools: vec![ToolDescriptor {
            name: ADD_EXPENSE_TOOL,
            description: "Add a new expense to the expenses CSV file",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "date": {
                        "type": "string",
                        "format": "date",
                        "description": "Date of the expense (YYYY-MM-DD)"
                    },
                    "amount": {
                        "type": "number",
                        "exclusiveMinimum": 0,
                        "description": "Amount spent, in currency units"
                    },
                    "category": { "type": "string" },
                    "description": { "type": "string" },
                    "payment_method": {
                        "type": "string",
                        "enum": payment_methods
                    }
                },
                "required": ["date", "amount", "category", "description", "payment_method"]
            }),
        }],
        prompts: vec![PromptDescriptor {
            name: EXPENSE_PROMPT,
            description: "Generate a prompt to add a new expense using the add_expense tool.",
            arguments: vec![
                prompt_argument("date", "Date of the expense (YYYY-MM-DD)"),
                prompt_argument("amount", "Amount spent"),
                prompt_argument("category", "Expense category"),
                prompt_argument("description", "What the money was spent on"),
                prompt_argument("payment_method", "How the expense was paid"),
            ],
        }],
    }
}

fn prompt_argument(name: &'static str, description: &'static str) -> PromptArgument {
    PromptArgument {
        name,
        description,
        required: true,
    }
}

fn parse_args<T: DeserializeOwned>(name: &str, arguments: Value) -> Result<T, DispatchError> {
    serde_json::from_value(arguments).map_err(|source| DispatchError::InvalidArguments {
        name: name.to_string(),
        source,
    })
}

impl ExpenseService {
    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> String {
        match uri {
            EXPENSES_RESOURCE_URI => self.get_expenses_data().await,
            _ => error_message(DispatchError::UnknownResource(uri.to_string())),
        }
    }

    /// Call a tool by name with JSON arguments.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> String {
        match name {
            ADD_EXPENSE_TOOL => match parse_args::<AddExpenseArgs>(name, arguments) {
                Ok(args) => {
                    self.add_expense(
                        &args.date,
                        args.amount,
                        &args.category,
                        &args.description,
                        args.payment_method,
                    )
                    .await
                }
                Err(e) => error_message(e),
            },
            _ => error_message(DispatchError::UnknownTool(name.to_string())),
        }
    }

    /// Render a prompt by name with JSON arguments.
    pub fn get_prompt(&self, name: &str, arguments: Value) -> String {
        match name {
            EXPENSE_PROMPT => match parse_args::<PromptArgs>(name, arguments) {
                Ok(args) => self.create_expense_prompt(
                    &args.date,
                    args.amount,
                    &args.category,
                    &args.description,
                    &args.payment_method,
                ),
                Err(e) => error_message(e),
            },
            _ => error_message(DispatchError::UnknownPrompt(name.to_string())),
        }
    }
}

fn error_message(error: DispatchError) -> String {
    log::warn!(target: "audit", "{}", error);
    format!("Error: {}", error)
}
