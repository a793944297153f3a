mod http;
mod storage;
mod usecases;
