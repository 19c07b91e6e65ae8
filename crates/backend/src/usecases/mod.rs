pub mod u510_load_sales_archives;
