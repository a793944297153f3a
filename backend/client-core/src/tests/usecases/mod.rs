mod remote_authentication;
