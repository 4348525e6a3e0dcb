mod gramota_client_test;
