pub mod authentication;
pub use authentication::{AuthenticationUseCase, TokenCell};
pub mod check_order;
pub use check_order::{CheckOrderResponse, CheckOrderUseCase};
pub mod checkout;
pub use checkout::{CardCheckoutResponse, CheckoutUseCase, PixCheckoutResponse};
pub mod confirmation;
pub use confirmation::{ConfirmationResponse, ConfirmationUseCase};
pub mod debts;
pub use debts::{AsyncDebtsResponse, DebtsResponse, DebtsUseCase};
pub mod installments;
pub use installments::{InstallmentsResponse, InstallmentsUseCase};
pub mod vehicle;
pub use vehicle::{VehicleResponse, VehicleUseCase};
pub mod webhook_register;
pub use webhook_register::{WebhookRegisterResponse, WebhookRegisterUseCase, WebhookReportResponse};
