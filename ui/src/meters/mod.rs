//! Meter management: filtering, create/edit modal form and deletion.

mod controller;
mod form;
mod model;
mod view;

pub use controller::{
    close_form, delete_meter, load_meters, open_create, open_edit, reset_filter, search,
    submit_meter, MeterFilter, METER_MODAL,
};
pub use form::{FormMode, MeterForm};
pub use model::MeterRecord;
pub use view::MeterManagePanel;
