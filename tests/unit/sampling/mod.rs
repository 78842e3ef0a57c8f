mod enumeration;
mod selection;
