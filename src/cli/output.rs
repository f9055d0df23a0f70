//! Output formatting for CLI

use crate::models::Order;

/// Format the three dataset statistics as a report
pub fn format_report(
    customer_id: u32,
    most_expensive: &Order,
    average_amount: f64,
    average_items: f64,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Customer {}:\n", customer_id));
    output.push_str(&format!(
        "  Most expensive order: {} (amount {:.2}, {} item(s))\n",
        most_expensive.order_id,
        most_expensive.amount,
        most_expensive.item_count()
    ));
    output.push_str(&format!("  Average order amount: {:.2}\n", average_amount));
    output.push_str(&format!(
        "\nAverage items per order across all customers: {:.2}\n",
        average_items
    ));

    output
}
