//! Built-in sample invoices
//!
//! Shown when the first invoice refresh of a session fails, so the invoice
//! list is demonstrably working even without a reachable collaborator. The
//! records are real-shaped trade data, stale arithmetic included; they are
//! never written back.

use once_cell::sync::Lazy;

use core_kernel::{InvoiceId, ItemId};
use domain_invoice::{Invoice, InvoiceItem, InvoiceStatus};

static SAMPLE_INVOICES: Lazy<Vec<Invoice>> = Lazy::new(build_samples);

/// The three built-in sample invoices
pub fn sample_invoices() -> &'static [Invoice] {
    &SAMPLE_INVOICES
}

fn item(
    id: &str,
    khata_name: &str,
    price_type: &str,
    cut: &str,
    nos: &str,
    weight: &str,
    price: &str,
    total: f64,
) -> InvoiceItem {
    InvoiceItem {
        id: ItemId::new(id),
        khata_name: khata_name.to_string(),
        price_type: price_type.to_string(),
        cut: cut.to_string(),
        nos: nos.to_string(),
        weight: weight.to_string(),
        price: price.to_string(),
        total,
    }
}

fn build_samples() -> Vec<Invoice> {
    let bank = |invoice: &mut Invoice| {
        invoice.bank_name = "The Varachha Co. Bank Ltd".to_string();
        invoice.bank_branch = "Pune Gram Canal Road".to_string();
        invoice.bank_account = "00710120471024".to_string();
        invoice.bank_ifsc = "VARA0289007".to_string();
    };
    let notes = "Goods sold and Delivered at Hand To Hand\nSubject to Surat Jurisdiction";

    let first = Invoice {
        id: InvoiceId::new("1"),
        invoice_no: "113/2026".to_string(),
        date: "2026-01-18".to_string(),
        place_of_supply: "Gujarat".to_string(),
        business_name: "MANOJ KAVAD".to_string(),
        business_address:
            "Plot No. 40/41, 3rd Floor, Vithal Nagar Soc., Motiyawadi, Varachha Road, Surat"
                .to_string(),
        business_gst: String::new(),
        business_pan: "FHRPK3434H".to_string(),
        business_mobile: String::new(),
        customer_name: "Krishna Diamond".to_string(),
        customer_address: "1st and 2nd Floor, Plot No 69 to 71, Mohan Nagar, Varachha Road, Near Rajhans Heights, Varachha, Surat, Gujarat, 395006".to_string(),
        customer_gst: String::new(),
        customer_pan: String::new(),
        items: vec![item(
            "1",
            "Lab Grown Diamonds Job work",
            "",
            "",
            "185",
            "121.7",
            "350",
            42595.0,
        )],
        subtotal: 42595.0,
        grand_total: 42595.0,
        bank_name: "The Varachha Co.Bank Ltd".to_string(),
        bank_branch: "Puna Gam Canal Road".to_string(),
        bank_account: "00710120471024".to_string(),
        bank_ifsc: "VARA0289007".to_string(),
        notes: notes.to_string(),
        status: InvoiceStatus::Paid,
    };

    let mut second = first.clone();
    second.id = InvoiceId::new("2");
    second.invoice_no = "106/26".to_string();
    second.date = "2026-01-10".to_string();
    second.business_name = "MANOJ BHAI KAVAD".to_string();
    second.customer_name = "SHREE MAHANT GEMS".to_string();
    second.customer_address = "PLOT NO 157, DIAMOND MENSION, 4TH FLOOR HALL NO 401, NANDU DOSHI NI WADI, GOTALAWADI KATARGAM, SURAT - 395004".to_string();
    second.customer_gst = "24AEBFS9465G1ZS".to_string();
    second.items = vec![item(
        "1",
        "18+ MANOJ BHAI KAVAD",
        "PER CRT",
        "0.18-0.99(PN/MQ/OV)",
        "502",
        "229.878",
        "800",
        183_902.4,
    )];
    second.subtotal = 183_902.4;
    second.grand_total = 183_902.4;
    bank(&mut second);
    second.status = InvoiceStatus::Pending;

    let mut third = second.clone();
    third.id = InvoiceId::new("3");
    third.invoice_no = "107/26".to_string();
    third.date = "2026-02-02".to_string();
    third.business_address =
        "Plot No. 40/41, 3rd Floor, Vithal Nagar Soc., Motiya wadi, Varachha Road, Surat"
            .to_string();
    third.items = vec![
        item("1", "18+ MANOJ BHAI KAVAD", "", "0.17-0.249", "12", "2.79", "190", 2280.0),
        item("2", "", "", "0.76-1.259", "27", "23.55", "700", 16485.0),
        item("3", "", "", "0.25-0.759", "362", "147.88", "800", 118_304.0),
    ];
    third.subtotal = 137_069.0;
    third.grand_total = 137_069.0;

    vec![first, second, third]
}
