pub const BANNER: &str = "\
+---------------------------------+
|Welcome to the figure calculator!|
+---------------------------------+
For menu enter help
";

pub const HELP: &str = "\
quit       -- exit from program
help       -- show this text
clear      -- delete all figures
area       -- area of all figures
area i     -- area of i figure
show       -- show vertexes
show i     -- vertexes of i figure
smaller s  -- figures whose area is smaller than s
remove i   -- delete i figure
insert i *figure* -- insert figure by index
new        -- create new doc
--------------------------
load fname -- load col
save fname -- save col
center     -- show center
center i   -- show center of i figure
undo       -- undo last command
redo       -- undo undo
figures must be entered by center and 1 vertex
squ ox oy ax ay or oct or tri
";
