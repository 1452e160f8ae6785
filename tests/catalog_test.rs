mod common;

use anyhow::Result;
use common::{ledger_contents, test_service, HEADER};
use expenses_tracker::application::{ADD_EXPENSE_TOOL, EXPENSES_RESOURCE_URI, EXPENSE_PROMPT};
use serde_json::json;

#[tokio::test]
async fn test_call_add_expense_by_name() -> Result<()> {
    let (service, _audit, _temp) = test_service()?;

    let message = service
        .call_tool(
            ADD_EXPENSE_TOOL,
            json!({
                "date": "2024-03-01",
                "amount": 42.5,
                "category": "Food",
                "description": "Lunch",
                "payment_method": "Cash"
            }),
        )
        .await;
    assert_eq!(message, "Successfully added expense: $42.5 for Lunch on 2024-03-01");
    assert_eq!(
        ledger_contents(&service)?,
        format!("{}\n2024-03-01,42.5,Food,Lunch,cash\n", HEADER)
    );
    Ok(())
}

#[tokio::test]
async fn test_call_with_integer_amount() -> Result<()> {
    let (service, _audit, _temp) = test_service()?;

    let message = service
        .call_tool(
            ADD_EXPENSE_TOOL,
            json!({
                "date": "2024-03-01",
                "amount": 20,
                "category": "Food",
                "description": "Pizza",
                "payment_method": "visa"
            }),
        )
        .await;
    assert_eq!(message, "Successfully added expense: $20.0 for Pizza on 2024-03-01");
    Ok(())
}

#[tokio::test]
async fn test_call_with_bad_arguments_writes_nothing() -> Result<()> {
    let (service, _audit, _temp) = test_service()?;

    let message = service
        .call_tool(
            ADD_EXPENSE_TOOL,
            json!({
                "date": "2024-03-01",
                "amount": 5,
                "category": "Food",
                "description": "Lunch",
                "payment_method": "cheque"
            }),
        )
        .await;
    assert!(message.starts_with("Error: Invalid arguments for add_expense"));

    let message = service
        .call_tool(ADD_EXPENSE_TOOL, json!({ "date": "2024-03-01" }))
        .await;
    assert!(message.starts_with("Error: Invalid arguments for add_expense"));

    assert!(!service.store().path().exists());
    Ok(())
}

#[tokio::test]
async fn test_call_tool_validation_message_passes_through() -> Result<()> {
    let (service, _audit, _temp) = test_service()?;

    let message = service
        .call_tool(
            ADD_EXPENSE_TOOL,
            json!({
                "date": "2024-03-01",
                "amount": -1,
                "category": "Food",
                "description": "Refund",
                "payment_method": "amex"
            }),
        )
        .await;
    assert_eq!(message, "Amount must be positive.");
    Ok(())
}

#[tokio::test]
async fn test_unknown_names() -> Result<()> {
    let (service, _audit, _temp) = test_service()?;

    assert_eq!(
        service.call_tool("delete_expense", json!({})).await,
        "Error: Unknown tool: delete_expense"
    );
    assert_eq!(
        service.read_resource("resource://budgets").await,
        "Error: Unknown resource: resource://budgets"
    );
    assert_eq!(
        service.get_prompt("summarize", json!({})),
        "Error: Unknown prompt: summarize"
    );
    Ok(())
}

#[tokio::test]
async fn test_read_resource_by_uri() -> Result<()> {
    let (service, _audit, _temp) = test_service()?;

    assert_eq!(
        service.read_resource(EXPENSES_RESOURCE_URI).await,
        "Error: expenses.csv file not found"
    );

    service
        .call_tool(
            ADD_EXPENSE_TOOL,
            json!({
                "date": "2024-03-01",
                "amount": 42.5,
                "category": "Food",
                "description": "Lunch",
                "payment_method": "cash"
            }),
        )
        .await;
    assert!(
        service
            .read_resource(EXPENSES_RESOURCE_URI)
            .await
            .starts_with("Expense data (1 entries):")
    );
    Ok(())
}

#[tokio::test]
async fn test_get_prompt_by_name() -> Result<()> {
    let (service, _audit, _temp) = test_service()?;

    let prompt = service.get_prompt(
        EXPENSE_PROMPT,
        json!({
            "date": "2024-03-01",
            "amount": 42.5,
            "category": "Food",
            "description": "Lunch",
            "payment_method": "company card"
        }),
    );
    assert!(prompt.starts_with("Please add the following expense:\n"));
    assert!(prompt.contains("- Payment Method: company card\n"));
    assert!(prompt.ends_with("Use the `add_expense` tool to record this transaction."));
    assert!(!service.store().path().exists());
    Ok(())
}
