mod envelope;
pub use self::envelope::Envelope;

mod gateway;
pub use self::gateway::{Gateway, GatewayID};

mod issuer;
pub use self::issuer::Issuer;

mod order;
pub use self::order::{
    Customer, Order, OrderInfo, Payment, PaymentDetails, MANDATORY_ORDER_FIELDS,
};

mod transaction;
pub use self::transaction::Transaction;
