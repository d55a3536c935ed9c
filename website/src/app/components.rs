pub mod icons;
pub mod project_upload_form;
