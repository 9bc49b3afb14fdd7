pub mod bill;
pub use bill::{Bill, BillDto, BillStatus};
pub mod billing_address;
pub use billing_address::{BillingAddress, BillingAddressDto};
pub mod card;
pub use card::{Card, CardDto};
pub mod client_details;
pub use client_details::{ClientDetails, ClientDetailsDto};
pub mod confirmation;
pub use confirmation::{Confirmation, ConfirmationDto};
pub mod customer;
pub use customer::{Customer, CustomerDto};
pub mod debt;
pub use debt::{Debt, DebtDto, DebtType};
pub mod installment_plan;
pub use installment_plan::{InstallmentPlan, InstallmentPlanDto, InstallmentType};
pub mod order;
pub use order::{Order, OrderDto};
pub mod pix;
pub use pix::{Pix, PixDto};
pub mod plate;
pub use plate::Plate;
pub mod protocol;
pub use protocol::ProtocolStatus;
pub mod renavam;
pub use renavam::Renavam;
pub mod state;
pub use state::State;
pub mod token;
pub use token::Token;
pub mod url;
pub use url::Url;
pub mod vehicle;
pub use vehicle::{CompleteVehicle, CompleteVehicleDto, SimpleVehicle, SimpleVehicleDto};
pub mod webhook;
pub use webhook::{WebhookPix, WebhookPixDto, WebhookReport, WebhookReportDto};
