// Integration tests for the authform front end
// Real factories against a wiremock server and a temp storage file

mod commands;
