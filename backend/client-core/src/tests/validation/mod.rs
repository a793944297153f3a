mod composite;
mod input;
mod validators;
