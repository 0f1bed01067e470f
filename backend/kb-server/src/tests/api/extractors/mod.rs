mod caller_id;
