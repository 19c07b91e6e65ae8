pub mod a030_sales_record;
