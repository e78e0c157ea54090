pub mod use_box_ids;
