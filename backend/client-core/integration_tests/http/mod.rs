mod reqwest_client;
