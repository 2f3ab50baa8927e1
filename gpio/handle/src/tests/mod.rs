mod digital;
