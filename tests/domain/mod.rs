mod ranked_match_test;
