use crate::domain::model::{ReturnPolicy, Vehicle};

/// Source of the settings a desk is started with.
pub trait ConfigProvider {
    fn desk_name(&self) -> &str;
    fn currency_symbol(&self) -> &str;
    fn return_policy(&self) -> ReturnPolicy;
    fn fleet(&self) -> Vec<Vehicle>;
}
