use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
             _                               
   _ __ ___ | | __  ___  _ __  _ __ ___  _ __  
  | '_ ` _ \| |/ / / __|| '_ \| '_ ` _ \| '_ \ 
  | | | | | |   <  \__ \| | | | | | | | | |_) |
  |_| |_| |_|_|\_\ |___/|_| |_|_| |_| |_| .__/ 
                                        |_|    
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green()));
}
