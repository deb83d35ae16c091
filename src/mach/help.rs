pub const HELP: &str = "\
USAGE:

  rpn                          Launch in interactive mode
  rpn [expression]             Evaluate a one-line expression

EXAMPLES

  rpn 1 2 + 3 + 4 + 5 +              => 15
  rpn pi cos                         => -1
  rpn                                => interactive mode

ARITHMETIC OPERATORS

  +          Add
  -          Subtract
  *          Multiply
  /          Divide
  cla        Clear the stack, variables and macros
  clr        Clear the stack
  clv        Clear the variables
  clm        Clear the macros
  !          Boolean NOT
  !=         Not equal to
  %          Modulus
  ++         Increment
  --         Decrement

BITWISE OPERATORS

  &          Bitwise AND
  |          Bitwise OR
  ^          Bitwise XOR
  ~          Bitwise NOT
  <<         Bitwise shift left
  >>         Bitwise shift right

BOOLEAN OPERATORS

  &&         Boolean AND
  ||         Boolean OR
  ^^         Boolean XOR

COMPARISON OPERATORS

  <          Less than
  <=         Less than or equal to
  ==         Equal to
  >          Greater than
  >=         Greater than or equal to

TRIGONOMETRIC FUNCTIONS

  acos       Arc Cosine
  asin       Arc Sine
  atan       Arc Tangent
  cos        Cosine
  cosh       Hyperbolic Cosine
  sin        Sine
  sinh       Hyperbolic Sine
  tanh       Hyperbolic tangent

NUMERIC UTILITIES

  ceil       Ceiling
  floor      Floor
  round      Round
  ip         Integer part
  fp         Floating part
  sign       Push -1, 0, or 1 depending on the sign
  abs        Absolute value
  max        Max
  min        Min

DISPLAY MODES

  hex        Switch display mode to hexadecimal
  dec        Switch display mode to decimal (default)
  bin        Switch display mode to binary
  oct        Switch display mode to octal

CONSTANTS

  e          Push e
  pi         Push Pi
  rand       Generate a random number

MATHEMATIC FUNCTIONS

  exp        Exponentiation
  fact       Factorial
  sqrt       Square Root
  ln         Natural Logarithm
  log        Logarithm, e.g. '100 10 log'
  pow        Raise a number to a power

NETWORKING

  hnl        Host to network long
  hns        Host to network short
  nhl        Network to host long
  nhs        Network to host short

STACK MANIPULATION

  pick       Move the n'th item from the top to the top
  repeat     Repeat an operation n times, e.g. '3 repeat +'
  depth      Push the current stack depth
  drop       Drops the top item from the stack
  dropn      Drops n items from the stack
  dup        Duplicates the top stack item
  dupn       Duplicates the top n stack items in order
  dupN       Same as 'N dupn', e.g. 'dup3'
  roll       Roll the stack upwards by n
  rolld      Roll the stack downwards by n
  stack      Toggles stack display from horizontal to vertical
  swap       Swap the top 2 stack items

MACROS AND VARIABLES

  macro      Defines a macro, e.g. 'macro kib 1024 *'
  x=         Assigns a variable, e.g. '1024 x='

OTHER

  help       Print the help message
  exit       Exit the calculator
";
