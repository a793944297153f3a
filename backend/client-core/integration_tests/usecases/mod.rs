mod remote_usecases;
