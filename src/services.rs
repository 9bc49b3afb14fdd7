pub mod transport;
pub use transport::{HttpTransport, ReqwestTransport, RequestOptions, RequestResponse};
pub mod zapay_service;
pub use zapay_service::ZapayService;
