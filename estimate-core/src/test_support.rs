//! Shared fixtures for unit tests.

use crate::models::{
    ChangeOrder, DesignId, DesignSet, DesignTheme, Discount, DiscountKind, EstimateHeader,
    Expense, LayoutVariant, LineItem, Payment, PaymentRecord, Production, ProductionPhase,
    Workscopes,
};

fn phase(
    num: u8,
    name: &str,
    date: &str,
) -> ProductionPhase {
    ProductionPhase {
        name: name.to_string(),
        phase_num: format!("PHASE {num:02}"),
        date: date.to_string(),
        notes: String::new(),
    }
}

/// A sold reroof with a deposit recorded and a balance outstanding.
pub(crate) fn sample_design() -> DesignSet {
    DesignSet {
        id: DesignId(2),
        theme: DesignTheme::Blue,
        layout_variant: LayoutVariant::Compact,
        header: EstimateHeader {
            estimate_number: "EST-552882".to_string(),
            title: "Full Reroof - Martinez Family".to_string(),
            status: "Sold".to_string(),
            created_date: "Feb 2, 2026".to_string(),
        },
        workscopes: Workscopes {
            estimate_total: "$12,450.00".to_string(),
            workscope_label: "1 GAF Timberline HDZ".to_string(),
            line_items: vec![LineItem {
                sort: "1".to_string(),
                kind: "Services".to_string(),
                product: "Debris Removal & Hauling".to_string(),
                qty_cost: "650.00".to_string(),
                qty: "1".to_string(),
                total: "$650.00".to_string(),
                description: "Full tear-off and disposal.".to_string(),
            }],
        },
        payment: Payment {
            financing_option: "SF Premium (Level 2)".to_string(),
            applied_date: "10/02/2026".to_string(),
            total_savings: "$1,245.00".to_string(),
            total_paid: "$3,112.50".to_string(),
            remaining: "$9,337.50".to_string(),
            payments_recorded: 1,
            payment_history: vec![PaymentRecord {
                date: "02/10/2026".to_string(),
                amount: "$3,112.50".to_string(),
                method: "Deposit (25%)".to_string(),
            }],
            discounts: vec![Discount {
                id: "early-bird".to_string(),
                name: "Early Bird 5%".to_string(),
                description: "Book within 7 days".to_string(),
                checked: true,
                kind: DiscountKind::Percent,
                percent_value: Some(5),
                amount: Some("$622.50".to_string()),
            }],
        },
        change_orders: vec![
            ChangeOrder {
                date: "02/09/2026".to_string(),
                order: "ECO-101".to_string(),
                kind: "Addition".to_string(),
                desc: "Skylight flashing repair".to_string(),
                status: "Pending".to_string(),
                amount: "$385.00".to_string(),
            },
            ChangeOrder {
                date: "02/05/2026".to_string(),
                order: "ECO-100".to_string(),
                kind: "Credit".to_string(),
                desc: "Waive hauling upgrade".to_string(),
                status: "Approved".to_string(),
                amount: "-$150.00".to_string(),
            },
        ],
        production: Production {
            phases: vec![
                phase(1, "First Call", "02/02/2026"),
                phase(2, "Schedule", "02/10/2026"),
                phase(3, "Reminder", "02/20/2026"),
                phase(4, "In Progress", ""),
            ],
            order_placed: "12/02/2026".to_string(),
            expected_delivery: "22/02/2026".to_string(),
            ..Production::default()
        },
        expenses: vec![
            Expense {
                vendor_name: "GAF Materials".to_string(),
                invoice_date: "02/12/2026".to_string(),
                total: "$8,920.00".to_string(),
            },
            Expense {
                vendor_name: "ABC Dumpsters".to_string(),
                invoice_date: "02/14/2026".to_string(),
                total: "$420.00".to_string(),
            },
            Expense {
                vendor_name: "City Permit".to_string(),
                invoice_date: "02/10/2026".to_string(),
                total: "$285.00".to_string(),
            },
        ],
    }
}
